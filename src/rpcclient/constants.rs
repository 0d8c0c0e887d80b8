/// Number of elements the command channel can queue before blocking.
pub(super) const SEND_BUFFER_SIZE: usize = 50;
/// Capacity of the per-command response channel.  Every command receives
/// exactly one response.
pub(super) const RESPONSE_BUFFER_SIZE: usize = 1;
