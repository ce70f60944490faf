pub use std::error::Error;

pub type Res<T> = Result<T,Box<dyn Error>>;

#[derive(Debug)]
pub struct GenericError(String);

impl std::fmt::Display for GenericError {
    fn fmt(&self,fmt:&mut std::fmt::Formatter)->Result<(),std::fmt::Error> {
        write!(fmt,"{}",self.0)
    }
}

impl Error for GenericError { }

pub fn error(msg:&str)->Box<dyn Error> {
    Box::new(GenericError(msg.to_string()))
}
