mod arithmetic;
mod cast;
mod compare;
mod encryption;
mod module;
mod random;
