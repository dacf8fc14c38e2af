mod outbound;

pub use outbound::{
    IOutboundHttp, InMemoryOutboundHttp, LarkTextContent, LarkTextMessage, ReqwestOutboundHttp,
};
