pub mod u508_preview_url_additions;
