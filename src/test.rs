mod gcm;
mod khazad;
