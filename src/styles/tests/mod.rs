mod errors;
mod source;
