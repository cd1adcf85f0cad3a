pub mod common;



#[cfg(test)]
mod test_my_choice;


#[cfg(test)]
mod test_extremum;
