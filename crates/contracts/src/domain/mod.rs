pub mod a001_sku;
