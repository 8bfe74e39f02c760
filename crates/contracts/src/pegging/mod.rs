pub mod ia_lite;
