//! Image upload handlers.

use actix_multipart::{Multipart, MultipartError};
use actix_web::{HttpRequest, HttpResponse, http::header, web};
use futures::TryStreamExt;

use quill_core::domain::{ImageCategory, IncomingFile};
use quill_shared::dto::UploadResponse;

use crate::config::AppConfig;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the file.
pub const IMAGE_FIELD: &str = "image";

/// POST /upload/user
pub async fn upload_user(
    req: HttpRequest,
    payload: Multipart,
    state: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> AppResult<HttpResponse> {
    upload(ImageCategory::User, req, payload, state, config).await
}

/// POST /upload/post
pub async fn upload_post(
    req: HttpRequest,
    payload: Multipart,
    state: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> AppResult<HttpResponse> {
    upload(ImageCategory::Post, req, payload, state, config).await
}

async fn upload(
    category: ImageCategory,
    req: HttpRequest,
    payload: Multipart,
    state: web::Data<AppState>,
    config: web::Data<AppConfig>,
) -> AppResult<HttpResponse> {
    let file = read_image(&req, payload, config.max_body_bytes).await?;
    let stored = state.uploads.upload(category, file).await?;

    Ok(HttpResponse::Ok().json(UploadResponse::ok(stored.url)))
}

/// Pull the first file part named `image` out of the request.
///
/// Requests that are not multipart, or whose body ends before the first
/// part, yield `None`. Other parts are drained and dropped. The whole body
/// is capped at `limit` bytes.
async fn read_image(
    req: &HttpRequest,
    mut payload: Multipart,
    limit: usize,
) -> AppResult<Option<IncomingFile>> {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"));
    if !is_multipart {
        return Ok(None);
    }

    let mut image = None;
    let mut total = 0usize;
    let mut seen_part = false;

    loop {
        let next = match payload.try_next().await {
            Ok(next) => next,
            // Nothing readable before the first part: no file was sent.
            Err(_) if !seen_part => return Ok(None),
            Err(err) => return Err(multipart_error(err)),
        };
        let Some(mut field) = next else {
            break;
        };
        seen_part = true;

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);
        let wanted =
            image.is_none() && field.name() == Some(IMAGE_FIELD) && original_name.is_some();

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            total += chunk.len();
            if total > limit {
                return Err(AppError::PayloadTooLarge(format!(
                    "Upload exceeds {} bytes",
                    limit
                )));
            }
            if wanted {
                data.extend_from_slice(&chunk);
            }
        }

        if wanted {
            image = Some(IncomingFile {
                original_name,
                data,
            });
        }
    }

    Ok(image)
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::BadRequest(format!("Malformed multipart body: {}", err))
}
