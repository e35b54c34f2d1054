mod assembler;
mod builder;
mod util;
