pub mod gateway_client;
pub mod review_form;
pub mod reviews_list;
