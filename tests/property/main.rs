mod compile;
mod layout;
