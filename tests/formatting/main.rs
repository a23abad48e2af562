mod formatter;
mod properties;
