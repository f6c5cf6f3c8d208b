pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod models;
pub mod probability;
pub mod tract;

#[cfg(test)]
mod test;
