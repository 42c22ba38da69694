
#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod registration_tests;


#[cfg(test)]
mod staff_approval_tests;
