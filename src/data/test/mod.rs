mod blog;
mod faq;
mod navigation;
mod partner;
mod plan;
mod setting;
mod testimonial;
mod user;
