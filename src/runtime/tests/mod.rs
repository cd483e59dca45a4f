mod app;
mod component;
