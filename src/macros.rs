/// Answer the request with HTTP 200 and the rendered document as response body
#[macro_export]
macro_rules! http_ok_html {
    ($document:expr) => {
        return Ok(actix_web::HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body($document));
    };
}

/// Answer the request with HTTP 303 pointing the browser to `$location`
#[macro_export]
macro_rules! http_see_other {
    ($location:expr) => {
        return Ok(actix_web::HttpResponse::SeeOther()
            .header(actix_web::http::header::LOCATION, $location)
            .finish());
    };
}
