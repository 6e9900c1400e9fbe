pub mod u602_ask_question;
