use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::error::ApiError;
use crate::debug_log;
use crate::models::{CourseFilter, CoursePayload, EnrollmentCreate, GradeUpdate, StudentPayload};

/// `DELETE` endpoints answer 204 on success and nothing else counts.
pub fn is_delete_success(status: u16) -> bool {
    status == 204
}

// REST API client for the records service
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::current_config().url(path)
    }

    fn to_body<T: Serialize>(payload: &T) -> Result<String, JsValue> {
        serde_json::to_string(payload)
            .map_err(|e| JsValue::from_str(&format!("encode error: {}", e)))
    }

    // -------------------------------------------------------------------
    // Students
    // -------------------------------------------------------------------

    pub async fn get_students() -> Result<String, JsValue> {
        Self::fetch_json(&Self::url("/students"), "GET", None).await
    }

    pub async fn create_student(payload: &StudentPayload) -> Result<String, JsValue> {
        let body = Self::to_body(payload)?;
        Self::fetch_json(&Self::url("/students"), "POST", Some(&body)).await
    }

    pub async fn update_student(student_id: u32, payload: &StudentPayload) -> Result<String, JsValue> {
        let body = Self::to_body(payload)?;
        let url = Self::url(&format!("/students/{}", student_id));
        Self::fetch_json(&url, "PATCH", Some(&body)).await
    }

    pub async fn delete_student(student_id: u32) -> Result<(), JsValue> {
        Self::delete(&Self::url(&format!("/students/{}", student_id))).await
    }

    // -------------------------------------------------------------------
    // Courses & instructors
    // -------------------------------------------------------------------

    /// GET /api/courses with the optional level / instructor filter.
    pub async fn get_courses(filter: &CourseFilter) -> Result<String, JsValue> {
        let url = Self::url(&format!("/courses{}", filter.query_string()));
        Self::fetch_json(&url, "GET", None).await
    }

    /// GET /api/courses/:id – includes instructor and enrolled students.
    pub async fn get_course(course_id: u32) -> Result<String, JsValue> {
        Self::fetch_json(&Self::url(&format!("/courses/{}", course_id)), "GET", None).await
    }

    pub async fn create_course(payload: &CoursePayload) -> Result<String, JsValue> {
        let body = Self::to_body(payload)?;
        Self::fetch_json(&Self::url("/courses"), "POST", Some(&body)).await
    }

    pub async fn update_course(course_id: u32, payload: &CoursePayload) -> Result<String, JsValue> {
        let body = Self::to_body(payload)?;
        let url = Self::url(&format!("/courses/{}", course_id));
        Self::fetch_json(&url, "PATCH", Some(&body)).await
    }

    pub async fn delete_course(course_id: u32) -> Result<(), JsValue> {
        Self::delete(&Self::url(&format!("/courses/{}", course_id))).await
    }

    pub async fn get_instructors() -> Result<String, JsValue> {
        Self::fetch_json(&Self::url("/instructors"), "GET", None).await
    }

    // -------------------------------------------------------------------
    // Enrollments
    // -------------------------------------------------------------------

    pub async fn create_enrollment(payload: &EnrollmentCreate) -> Result<String, JsValue> {
        let body = Self::to_body(payload)?;
        Self::fetch_json(&Self::url("/enrollments"), "POST", Some(&body)).await
    }

    pub async fn update_enrollment(enrollment_id: u32, payload: &GradeUpdate) -> Result<String, JsValue> {
        let body = Self::to_body(payload)?;
        let url = Self::url(&format!("/enrollments/{}", enrollment_id));
        Self::fetch_json(&url, "PATCH", Some(&body)).await
    }

    pub async fn delete_enrollment(enrollment_id: u32) -> Result<(), JsValue> {
        Self::delete(&Self::url(&format!("/enrollments/{}", enrollment_id))).await
    }

    // -------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------

    async fn send(url: &str, method: &str, body: Option<&str>) -> Result<Response, JsValue> {
        // If the page is served over HTTPS but the URL is HTTP, upgrade it to
        // HTTPS to avoid mixed-content blocking.
        let mut effective_url = url.to_string();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        if let Ok(protocol) = window.location().protocol() {
            if protocol == "https:" && effective_url.starts_with("http://") {
                effective_url = effective_url.replacen("http://", "https://", 1);
            }
        }

        // `RequestInit` mutates its JS object through interior mutability.
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&effective_url, &opts)?;

        debug_log!("{} {}", method, effective_url);
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                let reason = e.as_string().unwrap_or_else(|| format!("{:?}", e));
                JsValue::from(ApiError::Network(reason))
            })?;
        let resp: Response = resp_value.dyn_into()?;
        Ok(resp)
    }

    async fn status_error(resp: &Response) -> ApiError {
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        ApiError::Status {
            status: resp.status(),
            body,
        }
    }

    /// Perform a request and return the body text of a 2xx answer. Any other
    /// status becomes an [`ApiError::Status`] wrapped in a `JsValue`.
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
        let resp = Self::send(url, method, body).await?;
        if !resp.ok() {
            return Err(Self::status_error(&resp).await.into());
        }
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }

    async fn delete(url: &str) -> Result<(), JsValue> {
        let resp = Self::send(url, "DELETE", None).await?;
        if is_delete_success(resp.status()) {
            Ok(())
        } else {
            Err(Self::status_error(&resp).await.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_204_counts_as_deleted() {
        assert!(is_delete_success(204));
        assert!(!is_delete_success(200));
        assert!(!is_delete_success(202));
        assert!(!is_delete_success(404));
        assert!(!is_delete_success(500));
    }
}
