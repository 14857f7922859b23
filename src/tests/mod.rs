#[cfg(test)]
pub mod common;

#[cfg(test)]
mod test_evolution;


#[cfg(test)]
mod test_client;

#[cfg(test)]
mod test_formatter;
