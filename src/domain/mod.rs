// Domain layer: value types shared by the cipher core and the HTTP adapter.

pub mod model;
