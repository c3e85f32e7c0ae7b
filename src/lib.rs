pub mod emit {
    pub mod emitter;
}
pub mod extract {
    pub mod extractor;
}
pub mod map {
    pub mod color;
    pub mod controller;
    pub mod stats;
    pub mod surface;
    pub mod svg;
}
pub mod region {
    pub mod catalog;
    pub mod mapping;
}
pub mod service {
    pub mod generate_service;
    pub mod var_service;
}
pub mod util {
    pub mod log_service;
    pub mod path_service;
}
pub mod error;
pub mod prelude;
