/// First listed rejection type found in `$err`, paired with its status and
/// its `Display` text.
#[macro_export]
macro_rules! rejection_status {
    ($err:expr; $($path:path => $code:expr),+ $(,)?) => {{
        let err = &$err;
        Option::<(warp::http::StatusCode, String)>::None
            $(
                .or_else(|| err.find::<$path>().map(|e| ($code, e.to_string())))
            )+
    }};
}

#[macro_export]
macro_rules! bail_if_err {
    ($res:expr) => {{
        let result = $res
            .map_err($crate::utils::from_anyhow)
            .map_err(warp::Reply::into_response);

        match result {
            Ok(value) => value,
            Err(e) => return Ok(e),
        }
    }};
}

#[macro_export]
macro_rules! value_or_404 {
    ($expr:expr, $message:expr) => {{
        match $expr {
            Some(value) => value,
            None => {
                return Ok($crate::utils::error_reply(
                    warp::http::StatusCode::NOT_FOUND,
                    $message,
                ))
            }
        }
    }};
    ($expr:expr) => {{
        $crate::value_or_404!($expr, "Requested resource not found")
    }};
}
