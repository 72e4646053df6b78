pub mod fdlibm;
