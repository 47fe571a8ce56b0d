use crate::domain::{
    ListOpt, PhotoOpt, ProfileImageOpt, RandomPhotoOpt, SearchOpt, StatsOpt,
};

type Query = Vec<(String, String)>;

fn push(params: &mut Query, key: &str, value: impl ToString) {
    params.push((key.to_owned(), value.to_string()));
}

fn push_opt(params: &mut Query, key: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        push(params, key, value);
    }
}

pub fn encode_list_query(opt: &ListOpt) -> Query {
    let mut params = Query::new();
    push_opt(&mut params, "page", opt.page);
    push_opt(&mut params, "per_page", opt.per_page);
    push_opt(&mut params, "order_by", opt.order_by.map(|order| order.as_str()));
    params
}

pub fn encode_search_query(opt: &SearchOpt) -> Query {
    let mut params = Query::new();
    push(&mut params, "query", opt.query.trim());
    push_opt(&mut params, "page", opt.page);
    push_opt(&mut params, "per_page", opt.per_page);
    push_opt(
        &mut params,
        "orientation",
        opt.orientation.map(|orientation| orientation.as_str()),
    );
    params
}

pub fn encode_photo_query(opt: &PhotoOpt) -> Query {
    let mut params = Query::new();
    push_opt(&mut params, "w", opt.width);
    push_opt(&mut params, "h", opt.height);
    if let Some(rect) = opt.rect {
        push(
            &mut params,
            "rect",
            format!("{},{},{},{}", rect.x, rect.y, rect.width, rect.height),
        );
    }
    params
}

/// `count` is always sent so the API answers with an array.
pub fn encode_random_photo_query(opt: &RandomPhotoOpt) -> Query {
    let mut params = Query::new();
    push(&mut params, "count", opt.count.unwrap_or(1));
    if !opt.collections.is_empty() {
        push(&mut params, "collections", opt.collections.join(","));
    }
    if opt.featured {
        push(&mut params, "featured", "true");
    }
    push_opt(&mut params, "username", opt.username.as_deref());
    push_opt(&mut params, "query", opt.query.as_deref());
    push_opt(
        &mut params,
        "orientation",
        opt.orientation.map(|orientation| orientation.as_str()),
    );
    params
}

pub fn encode_stats_query(opt: &StatsOpt) -> Query {
    let mut params = Query::new();
    push_opt(&mut params, "resolution", opt.resolution.map(|res| res.as_str()));
    push_opt(&mut params, "quantity", opt.quantity);
    params
}

pub fn encode_profile_image_query(opt: &ProfileImageOpt) -> Query {
    let mut params = Query::new();
    push_opt(&mut params, "w", opt.width);
    push_opt(&mut params, "h", opt.height);
    params
}
