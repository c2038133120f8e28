pub mod d400_ecommerce;
