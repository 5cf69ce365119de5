use crate::models::DiseaseProfile;
use askama::Template;
use axum::response::IntoResponse;

/// Home page: the symptom form plus either an advisory or a prediction.
#[derive(Template, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_page: &'static str,
    pub symptom: String,
    pub message: Option<&'static str>,
    pub result: Option<DiseaseProfile>,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self {
            current_page: "home",
            ..Default::default()
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub current_page: &'static str,
}

#[derive(Template)]
#[template(path = "developer.html")]
pub struct DeveloperTemplate {
    pub current_page: &'static str,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_page: &'static str,
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub current_page: &'static str,
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate::new()
}

pub async fn about() -> impl IntoResponse {
    AboutTemplate {
        current_page: "about",
    }
}

pub async fn developer() -> impl IntoResponse {
    DeveloperTemplate {
        current_page: "developer",
    }
}

pub async fn contact() -> impl IntoResponse {
    ContactTemplate {
        current_page: "contact",
    }
}

pub async fn blog() -> impl IntoResponse {
    BlogTemplate {
        current_page: "blog",
    }
}
