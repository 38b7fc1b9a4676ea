extern crate textbook_rsa;

use rand::thread_rng;
use textbook_rsa::key::{PrivateKey, PublicKey};
use textbook_rsa::rsa::{self, KeyGenOptions};

fn main() {
    let plaintext = "hello world";

    match rsa::generate_keys(&KeyGenOptions::new(16), &mut thread_rng()) {
        Ok(keys) => {
            let ciphertext = keys.public().encrypt(plaintext).unwrap();
            let decrypted_plaintext = keys.private().decrypt(&ciphertext).unwrap();

            println!("{}", decrypted_plaintext);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::panic::panic_any(err)
        }
    };
}
