// Interactive Form: the HTML page, the multipart submission handler and the
// per-request tailoring function it delegates to.

pub mod handlers;
pub mod view;
