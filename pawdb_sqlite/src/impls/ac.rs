mod session;
mod user;
