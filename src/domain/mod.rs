// Domain layer: the cart aggregate, money, entities and the ports its collaborators implement.

pub mod cart;
pub mod model;
pub mod money;
pub mod ports;
