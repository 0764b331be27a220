pub mod u501_invoice_validation;
