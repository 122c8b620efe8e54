mod common;
mod resource_routing;
