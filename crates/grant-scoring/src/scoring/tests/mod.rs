mod common;
mod methods;
