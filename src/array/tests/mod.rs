mod clone;
mod erase;
mod render;
