mod category;
mod post;
mod sponsor;
