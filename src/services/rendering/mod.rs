//! HTML 렌더링

pub mod page_renderer;

pub use page_renderer::render_quiz_page;
