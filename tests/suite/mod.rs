mod registry_flow;
mod rendering;
mod theme_persistence;
