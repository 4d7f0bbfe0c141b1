mod modular;
