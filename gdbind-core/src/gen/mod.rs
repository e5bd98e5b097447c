pub mod central ; pub mod classes ;