mod broken;
mod errors;
mod flattening;
