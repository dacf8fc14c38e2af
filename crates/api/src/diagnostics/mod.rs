pub mod send_lark_msg;
