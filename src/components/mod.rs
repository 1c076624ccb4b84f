pub mod chatbot;
pub mod funnel_catalog;
pub mod product_card;
