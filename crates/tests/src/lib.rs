#[cfg(test)]
mod common;

#[cfg(test)]
mod judgment_flow_tests;

#[cfg(test)]
mod stale_response_tests;

#[cfg(test)]
mod dropdown_flow_tests;

#[cfg(test)]
mod scoped_resource_tests;

#[cfg(test)]
mod session_flow_tests;
