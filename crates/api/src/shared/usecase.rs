use futures::future::join_all;
use std::fmt::Debug;
use tracing::error;
use wf_review_infra::ReviewContext;

/// Subscriber is a side effect to a `UseCase`
///
/// It is going to act upon the response of the execution
/// of the `UseCase` if the execution was a success.
/// All subscribers of a `UseCase` run concurrently, in the order
/// they are listed.
#[async_trait::async_trait(?Send)]
pub trait Subscriber<U: UseCase> {
    async fn notify(&self, e: &U::Response, ctx: &ReviewContext);
}

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response: Debug;
    type Error: Debug;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error>;

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>>
    where
        Self: Sized,
    {
        Default::default()
    }
}

#[tracing::instrument(name = "UseCase executed", skip(usecase, ctx), fields(usecase = %U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &ReviewContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
{
    let res = usecase.execute(ctx).await;

    match &res {
        Ok(res) => {
            let subscribers = U::subscribers();
            let mut subscriber_promises = Vec::with_capacity(subscribers.len());
            for subscriber in &subscribers {
                subscriber_promises.push(subscriber.notify(res, ctx));
            }
            join_all(subscriber_promises).await;
        }
        Err(e) => {
            error!("Use case error: {:?}", e);
        }
    }

    res
}
