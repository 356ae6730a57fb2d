pub mod activity;
pub mod audit;
pub mod auth;
pub mod company;
pub mod dashboard;
pub mod dispatch;
pub mod finding;
pub mod nav;
pub mod plan;
pub mod process;
pub mod role;
pub mod route;
pub mod schema;
pub mod shared;
pub mod user;
