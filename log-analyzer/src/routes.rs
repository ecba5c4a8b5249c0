use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::invariants::Endpoint;

static STATIC_ASSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/img/|png|jpg|css|\.js").expect("valid static asset pattern"));

pub fn is_static_asset(route: &Endpoint) -> bool {
    STATIC_ASSET.is_match(route.as_str())
}

/// The `n` most requested routes that are not images, scripts or
/// stylesheets, busiest first. Ties are ordered by route.
pub fn top_routes(hits: &HashMap<Endpoint, usize>, n: usize) -> Vec<(&Endpoint, usize)> {
    let mut entries: Vec<_> = hits
        .iter()
        .filter(|(route, _)| !is_static_asset(route))
        .map(|(route, count)| (route, *count))
        .collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}
