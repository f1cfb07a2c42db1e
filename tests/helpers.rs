// Shared test helpers: backend payload fixtures and mock-server wiring.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use httptest::Server;
use serde_json::{json, Value};

use seo_insight::{BackendClient, Session};

/// Base URL of a running mock backend.
#[allow(dead_code)] // Used by other test files
pub fn base_url(server: &Server) -> String {
    format!("http://{}", server.addr())
}

/// A session talking to the mock backend, without progress output.
#[allow(dead_code)] // Used by other test files
pub fn session_for(server: &Server) -> Session {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create client");
    let client =
        BackendClient::new(&base_url(server), Arc::new(http)).expect("Mock base URL is valid");
    Session::new(client)
}

/// A typical `/analyze` response.
#[allow(dead_code)] // Used by other test files
pub fn seo_payload() -> Value {
    json!({
        "url": "https://example.com",
        "current_data": {
            "title": "Example Domain",
            "meta_description": "This domain is for use in illustrative examples.",
            "meta_tags": {
                "standard": [
                    {"name": "description", "content": "This domain is for use in illustrative examples."},
                    {"name": "viewport", "content": "width=device-width, initial-scale=1"}
                ],
                "opengraph": [
                    {"property": "og:title", "content": "Example Domain"},
                    {"property": "og:image", "content": "https://example.com/og.png"}
                ],
                "twitter": [],
                "other": [{"charset": "utf-8"}]
            },
            "preview_data": {
                "og_data": {"og:title": "Example Domain", "og:image": "https://example.com/og.png", "og:url": "https://www.example.com/"},
                "twitter_data": [{"name": "twitter:card", "content": "summary_large_image"}],
                "title": "Example Domain",
                "meta_description": "This domain is for use in illustrative examples.",
                "url": "https://example.com",
                "warnings": ["Missing og:description"],
                "notices": []
            }
        },
        "analysis": {
            "performance_score": 65,
            "weaknesses": ["Missing og:description", "Missing Twitter card tags"],
            "improvements": {
                "title": "Example Domain | Illustrative Examples",
                "standard": [],
                "opengraph": [{"property": "og:description", "content": "Examples for documentation."}],
                "twitter": [{"name": "twitter:title", "content": "Example Domain"}]
            }
        }
    })
}

/// A typical `/pagespeed` response (trimmed Lighthouse v5 payload).
#[allow(dead_code)] // Used by other test files
pub fn pagespeed_payload() -> Value {
    json!({
        "id": "https://example.com/",
        "lighthouseResult": {
            "requestedUrl": "https://example.com/",
            "finalUrl": "https://example.com/",
            "fetchTime": "2024-05-01T08:30:00.000Z",
            "categories": {"performance": {"title": "Performance", "score": 0.93}},
            "audits": {
                "first-contentful-paint": {"id": "first-contentful-paint", "title": "First Contentful Paint", "score": 0.99, "displayValue": "0.8 s"},
                "largest-contentful-paint": {"id": "largest-contentful-paint", "title": "Largest Contentful Paint", "score": 0.72, "displayValue": "2.9 s"},
                "cumulative-layout-shift": {"id": "cumulative-layout-shift", "title": "Cumulative Layout Shift", "score": 1, "displayValue": "0"},
                "total-blocking-time": {"id": "total-blocking-time", "title": "Total Blocking Time", "score": 0.45, "displayValue": "640 ms"},
                "speed-index": {"id": "speed-index", "title": "Speed Index", "score": null},
                "render-blocking-resources": {"id": "render-blocking-resources", "title": "Eliminate render-blocking resources", "score": 0.5, "displayValue": "Potential savings of 300 ms", "details": {"type": "opportunity", "items": [{"url": "https://example.com/app.css"}]}},
                "unused-javascript": {"id": "unused-javascript", "title": "Reduce unused JavaScript", "score": 0.3, "displayValue": "Potential savings of 120 KiB", "details": {"type": "opportunity", "items": [{"url": "https://example.com/app.js"}]}},
                "uses-text-compression": {"id": "uses-text-compression", "title": "Enable text compression", "score": 0.5, "details": {"type": "opportunity", "items": []}},
                "modern-image-formats": {"id": "modern-image-formats", "title": "Serve images in modern formats", "score": 0.8, "details": {"type": "opportunity", "items": [{}]}},
                "diagnostics": {"id": "diagnostics", "title": "Diagnostics", "score": null, "details": {"type": "debugdata", "items": [{}]}}
            },
            "fullPageScreenshot": {"screenshot": {"data": "data:image/webp;base64,UklGRg==", "width": 412, "height": 823}}
        },
        "loadingExperience": {
            "id": "https://example.com/",
            "overall_category": "AVERAGE",
            "metrics": {
                "FIRST_CONTENTFUL_PAINT_MS": {"category": "FAST", "percentile": 1100, "distributions": [
                    {"min": 0, "max": 1800, "proportion": 0.87},
                    {"min": 1800, "max": 3000, "proportion": 0.09},
                    {"min": 3000, "proportion": 0.04}
                ]},
                "LARGEST_CONTENTFUL_PAINT_MS": {"category": "AVERAGE", "percentile": 2900, "distributions": []}
            }
        }
    })
}
