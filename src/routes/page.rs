use axum::{extract::State, response::Html};

use crate::{services::page::render_page, state::SharedState};

pub async fn page_handler(State(state): State<SharedState>) -> Html<String> {
    Html(render_page(&state.page))
}
