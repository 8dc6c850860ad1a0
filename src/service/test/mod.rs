mod navigation;
mod plan;
mod setting;
mod stats;
mod team;
