//! PageFrame: standard root wrapper for every console page.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a001_client--list"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
//!         <PageHeader title="Clientes">...</PageHeader>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {}", page_id);
    debug_assert!(is_known_category(category), "bad category {}", category);

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
