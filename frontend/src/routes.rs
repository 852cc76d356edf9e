use dioxus::prelude::*;

use crate::data_definitions::query_params::SearchParams;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:..params")]
    SearchPage { params: SearchParams },
}
