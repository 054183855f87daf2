pub mod app_route;
pub mod matcher;
pub mod query;
pub mod route_service;
pub mod routes;
