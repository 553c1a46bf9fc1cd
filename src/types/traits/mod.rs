pub mod split_boundary;
