//! Progressive-web-app assets: manifest and service worker.

use serde_json::{json, Value};

use crate::config::BrandConfig;

pub const SERVICE_WORKER: &str = r#"const CACHE_NAME = 'evolve-v1';
const PRECACHE = ['/', '/manifest.json'];

self.addEventListener('install', (event) => {
  event.waitUntil(
    caches.open(CACHE_NAME).then((cache) => cache.addAll(PRECACHE))
  );
});

self.addEventListener('activate', (event) => {
  event.waitUntil(
    caches.keys().then((keys) =>
      Promise.all(keys.filter((key) => key !== CACHE_NAME).map((key) => caches.delete(key)))
    )
  );
});

self.addEventListener('fetch', (event) => {
  if (event.request.method !== 'GET') {
    return;
  }
  event.respondWith(
    fetch(event.request).catch(() => caches.match(event.request))
  );
});
"#;

pub fn manifest(brand: &BrandConfig) -> Value {
    json!({
        "name": format!("{} by {}", brand.assistant, brand.company),
        "short_name": brand.assistant,
        "description": "TikTok strategy generator",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#0f0c29",
        "theme_color": "#00ffcc",
        "icons": [
            { "src": "/static/icon-192.png", "sizes": "192x192", "type": "image/png" },
            { "src": "/static/icon-512.png", "sizes": "512x512", "type": "image/png" }
        ]
    })
}
