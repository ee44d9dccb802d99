#[cfg(test)]
mod common;

#[cfg(test)]
mod role_resolution_tests;

#[cfg(test)]
mod access_gate_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod admin_sign_in_tests;
