//! Error: a poisoned name is reported wherever it is mentioned.
#![deny(deprecated)]

fn main() {
    let token = String::from("secret");
    umbra::poison!(token => {
        let _alias = &token;
    });
    drop(token);
}
